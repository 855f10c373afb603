mod tests_cli;
