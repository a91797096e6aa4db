// Protected handlers: require a verified bearer token, applied as a route
// layer in the router. Budget entries are the only owner-checked resource.

pub mod budget;
