mod index_test;
mod insert_test;
mod join_test;
mod remove_test;
mod update_test;
