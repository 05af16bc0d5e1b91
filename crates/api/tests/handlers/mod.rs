mod availability_test;
mod meetings_test;
