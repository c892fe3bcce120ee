mod test_replay;
