use juniper::ID;
use tracing::debug;

use super::objects::book::parse_book_id;
use crate::state::AppData;
use crate::store::Book;

#[derive(Clone, Copy, Debug)]
pub struct Query;

#[juniper::graphql_object(context = crate::state::AppData)]
impl Query {
    fn books(ctx: &AppData) -> Vec<Book> {
        debug!(authn = ?ctx.signals.authn, authz = ?ctx.signals.authz, "listing books");
        ctx.store.list()
    }

    fn book(ctx: &AppData, book_id: ID) -> Option<Book> {
        let id = parse_book_id(&book_id)?;
        ctx.store.find_by_id(id)
    }
}
