mod fetch_all;
mod fetch_one;
