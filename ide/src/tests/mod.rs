mod test_edit;
