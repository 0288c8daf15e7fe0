mod groups_tests;
