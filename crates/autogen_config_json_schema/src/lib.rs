//! Writes the JSON Schema of Marquee's configuration file to `schema.json`
//! at build time.
