pub mod customer;

// // Add your other ones here to create a unified Mutation object
// // e.x. Mutation(CustomerMutation, OtherMutation, OtherOtherMutation)
#[derive(async_graphql::MergedObject, Default)]
#[graphql(name = "Mutation")]
pub struct Mutation(customer::Mutation);
