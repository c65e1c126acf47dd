//! Analytics
//!
//! Pure functions turning the fetched record collections into the derived
//! count series the dashboard renders. No IO, no state; empty input gives an
//! empty series and renderers are expected to no-op on those.

mod counts;

pub use counts::{
    applications_per_company, applications_per_day, count_by, jobs_by_type, users_by_role,
};
