use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::Result;

/// Current UTC time formatted as RFC 3339, used for `updated_at` and `timestamp` fields
pub fn now_rfc3339() -> Result<String> {
    Ok(OffsetDateTime::now_utc().format(&Rfc3339)?)
}
