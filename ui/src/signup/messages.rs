//! User-facing banner text for the admin sign-up screen.

pub const TEAM_ID_AVAILABLE: &str = "✓ Team ID is available!";
pub const TEAM_ID_TAKEN: &str = "Team ID already exists. Please choose a different one.";
pub const TEAM_ID_CHECK_FAILED: &str = "Error checking Team ID availability";

pub const ACCOUNT_CREATED: &str =
    "Admin account created successfully! Redirecting to your dashboard...";
pub const ACCOUNT_CREATION_FALLBACK: &str = "Failed to create account. Please try again.";
