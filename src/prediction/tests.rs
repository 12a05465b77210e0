mod category_test;
