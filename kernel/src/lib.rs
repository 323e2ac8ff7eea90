pub use crate::error::*;

mod catalog;
mod database;
mod entity;
mod error;
mod event;
mod modify;
mod pricing;
mod query;
mod storage;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod catalog {
        pub use crate::catalog::*;
    }
    pub mod database {
        pub use crate::database::*;
    }
    pub mod event {
        pub use crate::event::*;
    }
    pub mod pricing {
        pub use crate::pricing::*;
    }
    pub mod query {
        pub use crate::query::*;
    }
    pub mod storage {
        pub use crate::storage::*;
    }
    pub mod update {
        pub use crate::modify::*;
    }
}
