//! Well-known role name constants.
//!
//! These must match the `role` values seeded into the `users` table.

/// Platform administrator; may act on any company's resumes.
pub const ROLE_ADMIN: &str = "SUPER_ADMIN";

/// Company recruiter; scoped to exactly one company.
pub const ROLE_HR: &str = "HR";

/// Job seeker.
pub const ROLE_USER: &str = "USER";
