/// Dashboard bounded context
///
/// Contains the domain model for the Package Version Dashboard (records,
/// status indicators, requirements), pure rendering and graph services,
/// and license-selection policies.
pub mod domain;
pub mod policies;
pub mod services;
