use sqlx::PgPool;
use uuid::Uuid;

use crate::profile::repo_types::Profile;

const PROFILE_COLUMNS: &str = "id, name, blood_type, rh_factor, height, current_weight, \
     target_weight, start_weight, weeks_on_diet, diet_duration, onboarded, avatar_url, role";

pub async fn find(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<Profile>> {
    let profile = sqlx::query_as::<_, Profile>(&format!(
        "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
    ))
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    Ok(profile)
}

/// Insert or fully replace the user's profile row.
pub async fn upsert(db: &PgPool, profile: &Profile) -> anyhow::Result<Profile> {
    let saved = sqlx::query_as::<_, Profile>(&format!(
        r#"
        INSERT INTO profiles (id, name, blood_type, rh_factor, height, current_weight,
                              target_weight, start_weight, weeks_on_diet, diet_duration,
                              onboarded, avatar_url, role)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        ON CONFLICT (id) DO UPDATE SET
            name = EXCLUDED.name,
            blood_type = EXCLUDED.blood_type,
            rh_factor = EXCLUDED.rh_factor,
            height = EXCLUDED.height,
            current_weight = EXCLUDED.current_weight,
            target_weight = EXCLUDED.target_weight,
            start_weight = EXCLUDED.start_weight,
            weeks_on_diet = EXCLUDED.weeks_on_diet,
            diet_duration = EXCLUDED.diet_duration,
            onboarded = EXCLUDED.onboarded,
            avatar_url = EXCLUDED.avatar_url,
            role = EXCLUDED.role
        RETURNING {PROFILE_COLUMNS}
        "#
    ))
    .bind(profile.id)
    .bind(&profile.name)
    .bind(profile.blood_type)
    .bind(profile.rh_factor)
    .bind(profile.height)
    .bind(profile.current_weight)
    .bind(profile.target_weight)
    .bind(profile.start_weight)
    .bind(profile.weeks_on_diet)
    .bind(profile.diet_duration)
    .bind(profile.onboarded)
    .bind(&profile.avatar_url)
    .bind(profile.role)
    .fetch_one(db)
    .await?;
    Ok(saved)
}
