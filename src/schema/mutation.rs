use juniper::ID;

use super::objects::book::{BookInput, parse_book_id};
use crate::error::{StoreError, StoreResult};
use crate::state::AppData;
use crate::store::Book;

#[derive(Clone, Copy, Debug)]
pub struct Mutation;

#[juniper::graphql_object(context = crate::state::AppData)]
impl Mutation {
    fn add_book(ctx: &AppData, payload: BookInput) -> Book {
        let BookInput { title, author } = payload;
        ctx.store.add(title, author)
    }

    fn update_book(ctx: &AppData, book_id: ID, payload: BookInput) -> StoreResult<Book> {
        let id = parse_book_id(&book_id).ok_or_else(|| StoreError::NotFound(book_id.to_string()))?;
        let BookInput { title, author } = payload;
        ctx.store.update(id, title, author)
    }
}
