/// Trait for records listed and opened by the admin
///
/// Instance methods describe one record, the static ones describe the entity
/// kind (routes, page titles, export names).
pub trait EntityRecord {
    /// GraphQL ID of the record
    fn id(&self) -> &str;

    /// Short human code shown in titles and links (e.g. "Contrato #42")
    fn code(&self) -> String;

    /// Entity index in the app (e.g. "a002")
    fn entity_index() -> &'static str;

    /// Collection name, used as route segment and export entity (e.g. "contracts")
    fn collection_name() -> &'static str;

    /// Singular name for UI (e.g. "Contrato")
    fn element_name() -> &'static str;

    /// Plural name for UI (e.g. "Contratos")
    fn list_name() -> &'static str;

    /// Route of the list page
    fn list_route() -> String {
        format!("/{}", Self::collection_name())
    }

    /// Route of this record's detail page
    fn detail_route(&self) -> String {
        format!("/{}/{}", Self::collection_name(), self.id())
    }
}
