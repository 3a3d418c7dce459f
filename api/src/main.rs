//!

use customers_core::prelude::*;
use customers_graphql::{
    build_schema,
    handlers::{graphql_handler, health, playground},
    store::StoreClient,
    AppState, Args,
};
use poem::{get, listener::TcpListener, middleware::AddData, post, EndpointExt, Route, Server};

pub fn main() {
    let opts = customers_core::StartConfig {
        service_name: "customers-graphql",
    };

    customers_core::run(opts, |common, args: Args| {
        let Args { port, store } = args;

        common.rt.block_on(async move {
            let store = StoreClient::new(store)?;
            info!(store = %store.base_url, "using customer store");

            let state = AppState::new(build_schema(store));

            Server::new(TcpListener::bind(format!("0.0.0.0:{port}")))
                .run(
                    Route::new()
                        .at("/graphql", post(graphql_handler).with(AddData::new(state)))
                        .at("/playground", get(playground))
                        .at("/health", get(health)),
                )
                .await
                .context("failed to build graphql server")
        })
    });
}
