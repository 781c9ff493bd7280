//! Writes the SDL of Marquee's GraphQL API to `schema.graphql` at build time.
