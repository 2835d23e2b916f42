pub mod alias;
pub mod wordlist;
