use wordseek_game::GameError;
use wordseek_store::StoreError;

use crate::identity::AuthError;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From, derive_more::IsVariant)]
pub enum AppError {
    #[display("authentication failed: {_0}")]
    Auth(#[from] AuthError),
    #[display("{_0}")]
    Game(#[from] GameError),
    #[display("{_0}")]
    Store(#[from] StoreError),
    #[display("none of the {requested} words fit in a {size}x{size} grid")]
    NoWordsPlaced { requested: usize, size: usize },
}
