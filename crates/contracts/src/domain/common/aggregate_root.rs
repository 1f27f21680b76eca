use super::aggregate_id::AggregateId;
use super::entity_metadata::EntityMetadata;

/// Behaviour common to every aggregate root.
///
/// The static naming methods are the single source of truth for UI labels
/// (tab titles, list headers) and storage keys.
pub trait AggregateRoot {
    type Id: AggregateId;

    fn id(&self) -> Self::Id;

    fn code(&self) -> &str;

    fn description(&self) -> &str;

    fn metadata(&self) -> &EntityMetadata;

    /// Stable index of the aggregate within the domain ("a003").
    fn aggregate_index() -> &'static str;

    /// Snake-case collection name used for storage keys.
    fn collection_name() -> &'static str;

    /// Singular display name ("Order").
    fn element_name() -> &'static str;

    /// Plural display name used as the list/tab title ("Orders").
    fn list_name() -> &'static str;
}
