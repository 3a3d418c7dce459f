mod customer;

// // Add your other ones here to create a unified Query object
#[derive(async_graphql::MergedObject, Default)]
#[graphql(name = "RootQueryType")]
pub struct Query(customer::Query);
