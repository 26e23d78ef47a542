#[macro_use]
extern crate log;

mod moderate_taxonomy;
mod register_facility;
mod review_facility;

pub mod prelude {
    pub use super::{moderate_taxonomy::*, register_facility::*, review_facility::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use sportdir_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use sportdir_db_sqlite::Connections;
}
