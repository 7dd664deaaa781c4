mod request_file_tests;
