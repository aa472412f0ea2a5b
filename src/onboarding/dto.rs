use serde::Serialize;

use crate::onboarding::wizard::ProfileDraft;

/// Initial wizard state handed to the client: step 1 plus the draft seeded
/// from whatever profile data already exists.
#[derive(Debug, Serialize)]
pub struct WizardStateResponse {
    pub step: u8,
    pub draft: ProfileDraft,
}
