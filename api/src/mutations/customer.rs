use async_graphql::{Context, MaybeUndefined, Object, Result};

use crate::{
    error::nullable,
    objects::{Customer, CustomerPatch, NewCustomer},
    store::StoreClient,
};

#[derive(Default)]
pub struct Mutation;

#[Object(name = "CustomerMutation", rename_args = "snake_case")]
impl Mutation {
    /// Creates a customer. The store assigns its `id`.
    ///
    /// `age` is accepted as a string and stored as sent.
    ///
    /// Resolves to null with an error entry if the store is unreachable or
    /// rejects the customer.
    pub async fn add_customer(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: String,
        email: String,
        hair_colour: String,
        eye_colour: String,
    ) -> Result<Option<Customer>> {
        let store = ctx.data::<StoreClient>()?;

        let customer = NewCustomer {
            name,
            email,
            age,
            hair_colour,
            eye_colour,
        };

        Ok(nullable(ctx, store.create(&customer).await))
    }

    /// Deletes a customer, returning the deleted record when the store reports one.
    ///
    /// Resolves to null with an error entry if the store is unreachable or
    /// does not know the customer.
    pub async fn delete_customer(&self, ctx: &Context<'_>, id: String) -> Result<Option<Customer>> {
        let store = ctx.data::<StoreClient>()?;

        Ok(nullable(ctx, store.delete(&id).await).flatten())
    }

    /// Applies a partial update to a customer. Only `id` is required.
    ///
    /// Resolves to null with an error entry if the store is unreachable or
    /// does not know the customer.
    #[allow(clippy::too_many_arguments)]
    pub async fn edit_customer(
        &self,
        ctx: &Context<'_>,
        id: String,
        name: MaybeUndefined<String>,
        age: MaybeUndefined<i32>,
        email: MaybeUndefined<String>,
        hair_colour: MaybeUndefined<String>,
        eye_colour: MaybeUndefined<String>,
    ) -> Result<Option<Customer>> {
        let store = ctx.data::<StoreClient>()?;

        let patch = CustomerPatch {
            id,
            name,
            age,
            email,
            hair_colour,
            eye_colour,
        };

        Ok(nullable(ctx, store.update(&patch).await))
    }
}
