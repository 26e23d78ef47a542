pub use sportdir_core::{entities, usecases};

pub mod prelude {
    use std::result;

    pub use sportdir_application::error::{AppError, BError};
    pub use sportdir_core::{
        entities::*,
        repositories::{AccountRepo, FacilityRepo, SubFieldRepo, TaxonomyRepo},
        RepoError,
    };

    pub type Result<T> = result::Result<T, AppError>;
}
