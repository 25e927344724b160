// Test modules for Parley
// Each module contains the unit tests for the corresponding source file

mod helpers;
