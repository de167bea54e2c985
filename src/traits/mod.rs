pub mod executor;
pub mod inventory;
pub mod management;

pub use executor::Executor;
pub use inventory::Inventory;
pub use management::ManagementClient;
