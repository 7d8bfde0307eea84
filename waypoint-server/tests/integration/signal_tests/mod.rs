mod test_signal_relay_roundtrip;
