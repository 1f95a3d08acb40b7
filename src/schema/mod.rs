use juniper::RootNode;
use crate::state::AppData;

mod mutation;
mod objects;
mod query;

pub type Schema<'a> = RootNode<'a, query::Query, mutation::Mutation, juniper::EmptySubscription<AppData>>;

pub fn schema() -> Schema<'static> {
    Schema::new(query::Query, mutation::Mutation, juniper::EmptySubscription::new())
}
