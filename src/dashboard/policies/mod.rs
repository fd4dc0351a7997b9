/// Domain policies - business rules independent of any adapter
mod license_priority;

pub use license_priority::LicensePriority;
