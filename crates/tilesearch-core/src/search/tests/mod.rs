mod heap_tests;
