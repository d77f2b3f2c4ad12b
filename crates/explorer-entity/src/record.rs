//! Identity and validation helpers shared by every record type.

use uuid::Uuid;
use validator::Validate;

use explorer_core::error::AppError;
use explorer_core::result::AppResult;

/// A record that carries a unique identifier.
pub trait Identified {
    /// The record's identifier.
    fn id(&self) -> Uuid;
}

/// Two records are the same entity when their identifiers match,
/// regardless of any other attribute.
pub fn same_identity<A, B>(a: &A, b: &B) -> bool
where
    A: Identified + ?Sized,
    B: Identified + ?Sized,
{
    a.id() == b.id()
}

/// Run the record's field validation rules, mapping failures into a
/// validation error naming the offending fields.
pub fn validate_record<T: Validate>(record: &T) -> AppResult<()> {
    record.validate().map_err(|errors| {
        let field_errors = errors.field_errors();
        let mut fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
        fields.sort_unstable();
        AppError::validation(format!("Invalid field(s): {}", fields.join(", ")))
    })
}
