/// Uppercased currency code, as used for result keys
pub type Symbol = String;
