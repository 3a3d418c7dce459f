use async_graphql::{Context, Object, Result};

use crate::{
    error::{nullable, StoreError},
    objects::Customer,
    store::StoreClient,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Query;

#[Object(name = "CustomerQuery")]
impl Query {
    /// Look up a `customer` by its ID.
    ///
    /// Resolves to null with an error entry if `id` is missing, the store is
    /// unreachable or the store does not know the customer.
    async fn customer(&self, ctx: &Context<'_>, id: Option<String>) -> Result<Option<Customer>> {
        let store = ctx.data::<StoreClient>()?;

        let res = match id {
            Some(id) => store.get(&id).await,
            None => Err(StoreError::InvalidArgument("id is required".to_string())),
        };

        Ok(nullable(ctx, res))
    }

    /// Every customer, in the order the store returns them.
    ///
    /// Resolves to null with an error entry if the store is unreachable or
    /// responds with an error.
    async fn customers(&self, ctx: &Context<'_>) -> Result<Option<Vec<Customer>>> {
        let store = ctx.data::<StoreClient>()?;

        Ok(nullable(ctx, store.list().await))
    }
}
