mod resource_tests;
