pub mod colon_hex;
pub mod interface;
