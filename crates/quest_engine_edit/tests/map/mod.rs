mod undo_tests;
