pub mod address;
pub mod db;
pub mod errors;
pub mod shelter;

#[cfg(test)]
mod tests;
