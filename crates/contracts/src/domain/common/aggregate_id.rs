/// Typed identifier of an aggregate, convertible to and from its string form.
///
/// Every aggregate defines a newtype over `Uuid` implementing this trait so
/// that ids never mix between aggregate kinds.
pub trait AggregateId: Sized + Copy {
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}
