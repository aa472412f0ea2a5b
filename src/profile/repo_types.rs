use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Blood group, the key for every recommendation lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "blood_type")]
pub enum BloodType {
    A,
    B,
    AB,
    O,
}

impl std::fmt::Display for BloodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BloodType::A => "A",
            BloodType::B => "B",
            BloodType::AB => "AB",
            BloodType::O => "O",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "rh_factor")]
pub enum RhFactor {
    #[serde(rename = "+")]
    #[sqlx(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    #[sqlx(rename = "-")]
    Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Profile record in the database, one row per user.
///
/// `start_weight` is the progress anchor: it is written once when the
/// onboarding wizard completes and preserved by later profile edits.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub blood_type: BloodType,
    pub rh_factor: RhFactor,
    pub height: f64,
    pub current_weight: f64,
    pub target_weight: f64,
    pub start_weight: Option<f64>,
    pub weeks_on_diet: i32,
    pub diet_duration: i32,
    pub onboarded: bool,
    pub avatar_url: Option<String>,
    pub role: Role,
}

impl Profile {
    /// Synthesized profile for a user that has not saved one yet, so reads
    /// never 404 before onboarding.
    pub fn default_for(user_id: Uuid, email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            id: user_id,
            name,
            blood_type: BloodType::A,
            rh_factor: RhFactor::Plus,
            height: 1.70,
            current_weight: 70.0,
            target_weight: 65.0,
            start_weight: None,
            weeks_on_diet: 1,
            diet_duration: 4,
            onboarded: false,
            avatar_url: None,
            role: Role::User,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_uses_email_local_part_and_defaults() {
        let id = Uuid::new_v4();
        let p = Profile::default_for(id, "maria@example.com");
        assert_eq!(p.name, "maria");
        assert_eq!(p.blood_type, BloodType::A);
        assert_eq!(p.rh_factor, RhFactor::Plus);
        assert_eq!(p.height, 1.70);
        assert_eq!(p.current_weight, 70.0);
        assert_eq!(p.target_weight, 65.0);
        assert_eq!(p.diet_duration, 4);
        assert!(p.start_weight.is_none());
        assert!(!p.onboarded);
        assert!(!p.is_admin());
    }

    #[test]
    fn enum_serde_shapes() {
        assert_eq!(serde_json::to_string(&BloodType::AB).unwrap(), "\"AB\"");
        assert_eq!(serde_json::to_string(&RhFactor::Plus).unwrap(), "\"+\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let bt: BloodType = serde_json::from_str("\"O\"").unwrap();
        assert_eq!(bt, BloodType::O);
    }
}
