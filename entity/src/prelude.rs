pub use super::eve_alliance::Entity as EveAlliance;
pub use super::eve_corporation::Entity as EveCorporation;
