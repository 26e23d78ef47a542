pub mod repositories;
pub mod usecases;
pub mod util;

pub use self::repositories::Error as RepoError;

pub mod entities {
    pub use sportdir_entities::{
        account::*, email::*, facility::*, geo::*, id::*, price::*, schedule::*, sub_field::*,
        taxonomy::*, time::*,
    };
}
