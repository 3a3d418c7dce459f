#![deny(clippy::disallowed_methods, clippy::suspicious, clippy::style)]
#![warn(clippy::pedantic, clippy::cargo)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod handlers;
pub mod mutations;
pub mod objects;
pub mod queries;
pub mod store;

use async_graphql::{extensions, EmptySubscription, Schema};
use customers_core::clap;
use mutations::Mutation;
use queries::Query;
use store::StoreClient;

#[derive(Debug, clap::Args)]
#[command(version, author, about)]
pub struct Args {
    #[arg(short, long, env, default_value_t = 4000)]
    pub port: u16,

    #[command(flatten)]
    pub store: store::StoreArgs,
}

pub type AppSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builds the GraphQL Schema, attaching the store client to the context
#[must_use]
pub fn build_schema(store: StoreClient) -> AppSchema {
    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .extension(extensions::Logger)
        .data(store)
        .finish()
}

#[derive(Clone)]
pub struct AppState {
    pub schema: AppSchema,
}

impl AppState {
    #[must_use]
    pub fn new(schema: AppSchema) -> Self {
        Self { schema }
    }
}
