mod copy_tests;
