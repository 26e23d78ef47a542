mod error;
mod get_facility;
mod issue_account;
mod moderate_taxonomy;
mod new_facility;
mod register_facility;
mod review_facility;
mod taxonomy;

#[cfg(test)]
pub mod tests;

pub use self::{
    error::Error, get_facility::*, issue_account::*, moderate_taxonomy::*, new_facility::*,
    register_facility::*, review_facility::*, taxonomy::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
