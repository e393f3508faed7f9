use mongodb::IndexModel;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;

/// Single-field ascending index over `field`, which may be a dotted path
/// into an embedded document.
#[derive(Debug)]
pub struct IndexSpec {
    pub field: &'static str,
    pub unique: bool,
}

impl IndexSpec {
    /// Name of the index, pinned to the engine's default for a
    /// single-field ascending key so databases initialized by earlier
    /// tooling are recognized as already set up.
    pub fn index_name(&self) -> String {
        format!("{}_1", self.field)
    }

    pub fn model(&self) -> IndexModel {
        IndexModel::builder()
            .keys(doc! { self.field: 1 })
            .options(
                IndexOptions::builder()
                    .name(self.index_name())
                    .unique(self.unique)
                    .build(),
            )
            .build()
    }
}

#[derive(Debug)]
pub struct CollectionSpec {
    pub name: &'static str,
    pub indexes: &'static [IndexSpec],
}

/// The collection and index contract for the `coderoot_bot` database.
/// Downstream consumers rely on exactly these lookup structures existing,
/// no more and no fewer.
pub const SCHEMA: &[CollectionSpec] = &[
    CollectionSpec {
        name: "users",
        indexes: &[
            IndexSpec {
                field: "user_id",
                unique: true,
            },
            IndexSpec {
                field: "username",
                unique: false,
            },
            IndexSpec {
                field: "phone",
                unique: false,
            },
            IndexSpec {
                field: "subscription.plan",
                unique: false,
            },
            IndexSpec {
                field: "subscription.expires_at",
                unique: false,
            },
            IndexSpec {
                field: "created_at",
                unique: false,
            },
        ],
    },
    CollectionSpec {
        name: "shops",
        indexes: &[
            IndexSpec {
                field: "owner_id",
                unique: false,
            },
            IndexSpec {
                field: "bot_token",
                unique: true,
            },
            IndexSpec {
                field: "status",
                unique: false,
            },
            IndexSpec {
                field: "created_at",
                unique: false,
            },
        ],
    },
    CollectionSpec {
        name: "products",
        indexes: &[
            IndexSpec {
                field: "shop_id",
                unique: false,
            },
            IndexSpec {
                field: "category",
                unique: false,
            },
            IndexSpec {
                field: "status",
                unique: false,
            },
            IndexSpec {
                field: "created_at",
                unique: false,
            },
        ],
    },
    CollectionSpec {
        name: "orders",
        indexes: &[
            IndexSpec {
                field: "shop_id",
                unique: false,
            },
            IndexSpec {
                field: "customer_id",
                unique: false,
            },
            IndexSpec {
                field: "status",
                unique: false,
            },
            IndexSpec {
                field: "created_at",
                unique: false,
            },
        ],
    },
    CollectionSpec {
        name: "payments",
        indexes: &[
            IndexSpec {
                field: "user_id",
                unique: false,
            },
            IndexSpec {
                field: "shop_id",
                unique: false,
            },
            IndexSpec {
                field: "payment_type",
                unique: false,
            },
            IndexSpec {
                field: "status",
                unique: false,
            },
            IndexSpec {
                field: "created_at",
                unique: false,
            },
        ],
    },
];
