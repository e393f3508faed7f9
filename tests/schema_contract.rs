use chrono::Utc;
use coderoot_db_init::models::{Subscription, User, UserStats};
use coderoot_db_init::schema::SCHEMA;
use mongodb::bson::{self, Bson, doc};

#[test]
fn schema_lists_the_five_collections() {
    let names: Vec<&str> = SCHEMA.iter().map(|c| c.name).collect();
    assert_eq!(names, ["users", "shops", "products", "orders", "payments"]);
}

#[test]
fn schema_declares_twenty_two_indexes() {
    let total: usize = SCHEMA.iter().map(|c| c.indexes.len()).sum();
    assert_eq!(total, 22);

    let per_collection: Vec<(&str, usize)> = SCHEMA
        .iter()
        .map(|c| (c.name, c.indexes.len()))
        .collect();
    assert_eq!(
        per_collection,
        [
            ("users", 6),
            ("shops", 4),
            ("products", 4),
            ("orders", 4),
            ("payments", 5),
        ]
    );
}

#[test]
fn only_user_id_and_bot_token_are_unique() {
    let unique: Vec<(&str, &str)> = SCHEMA
        .iter()
        .flat_map(|c| {
            c.indexes
                .iter()
                .filter(|i| i.unique)
                .map(move |i| (c.name, i.field))
        })
        .collect();
    assert_eq!(unique, [("users", "user_id"), ("shops", "bot_token")]);
}

#[test]
fn index_names_follow_the_engine_default() {
    let users = &SCHEMA[0];
    let plan = users
        .indexes
        .iter()
        .find(|i| i.field == "subscription.plan")
        .expect("subscription.plan index");
    assert_eq!(plan.index_name(), "subscription.plan_1");

    let created_at = users
        .indexes
        .iter()
        .find(|i| i.field == "created_at")
        .expect("created_at index");
    assert_eq!(created_at.index_name(), "created_at_1");
}

#[test]
fn index_models_carry_the_declared_options() {
    let users = &SCHEMA[0];
    let user_id = users
        .indexes
        .iter()
        .find(|i| i.field == "user_id")
        .expect("user_id index");

    let model = user_id.model();
    assert_eq!(model.keys, doc! { "user_id": 1 });

    let options = model.options.expect("index options");
    assert_eq!(options.unique, Some(true));
    assert_eq!(options.name.as_deref(), Some("user_id_1"));
}

// The dotted index paths only resolve if users actually store an embedded
// subscription document with BSON datetimes.
#[test]
fn user_documents_nest_subscription_fields() {
    let now = Utc::now();
    let user = User {
        id: None,
        user_id: 42,
        username: Some("ferris".to_string()),
        first_name: "Ferris".to_string(),
        last_name: None,
        phone: Some("+100000000".to_string()),
        subscription: Subscription {
            plan: "free".to_string(),
            expires_at: now,
            is_active: true,
        },
        statistics: UserStats::default(),
        status: "active".to_string(),
        created_at: now,
        updated_at: now,
    };

    let document = bson::to_document(&user).expect("user serializes to a document");
    assert!(!document.contains_key("_id"));

    let subscription = document
        .get_document("subscription")
        .expect("embedded subscription document");
    assert_eq!(subscription.get_str("plan"), Ok("free"));
    assert!(matches!(
        subscription.get("expires_at"),
        Some(Bson::DateTime(_))
    ));

    assert!(matches!(document.get("created_at"), Some(Bson::DateTime(_))));
}
