use chrono::{Duration, Utc};
use coderoot_db_init::{
    config::AppConfig,
    db::create_db_handle,
    init::initialize,
    models::{Subscription, User, UserStats},
};
use mongodb::Database;
use mongodb::bson::{self, doc};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let db = create_db_handle(&config.mongo_uri, &config.database_name).await?;
    // Make sure the schema is in place before inserting anything.
    initialize(&db).await?;

    let admin_id = ensure_admin(&db, 123456789, "admin").await?;
    println!("Seed completed. Admin user_id: {admin_id}");
    Ok(())
}

async fn ensure_admin(db: &Database, user_id: i64, username: &str) -> anyhow::Result<i64> {
    let now = Utc::now();
    let admin = User {
        id: None,
        user_id,
        username: Some(username.to_string()),
        first_name: "Admin".to_string(),
        last_name: Some("User".to_string()),
        phone: None,
        subscription: Subscription {
            plan: "vip".to_string(),
            expires_at: now + Duration::days(365),
            is_active: true,
        },
        statistics: UserStats::default(),
        status: "active".to_string(),
        created_at: now,
        updated_at: now,
    };

    db.collection::<User>("users")
        .update_one(
            doc! { "user_id": user_id },
            doc! { "$setOnInsert": bson::to_document(&admin)? },
        )
        .upsert(true)
        .await?;

    println!("Ensured admin user {username} (user_id={user_id})");
    Ok(user_id)
}
