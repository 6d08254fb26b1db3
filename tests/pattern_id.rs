mod tests {
    use ring_pattern_player::PatternId;

    #[test]
    fn test_pattern_id_from_raw() {
        assert_eq!(PatternId::from_raw(100), Some(PatternId::FadeIn));
        assert_eq!(PatternId::from_raw(200), Some(PatternId::Off));
        assert_eq!(PatternId::from_raw(310), Some(PatternId::LoadingLong));
        assert_eq!(PatternId::from_raw(400), Some(PatternId::Breathe));
        assert_eq!(PatternId::from_raw(610), Some(PatternId::FlashFast));
        assert_eq!(PatternId::from_raw(701), Some(PatternId::PersistStatus2));
    }

    #[test]
    fn test_pattern_id_unknown_codes() {
        assert_eq!(PatternId::from_raw(0), None);
        assert_eq!(PatternId::from_raw(702), None);
        assert_eq!(PatternId::from_raw(999), None);
    }

    #[test]
    fn test_pattern_id_codes_are_stable() {
        let codes = PatternId::ALL.map(PatternId::as_u16);
        assert_eq!(
            codes,
            [100, 200, 300, 310, 320, 330, 400, 500, 600, 610, 700, 701]
        );
        for id in PatternId::ALL {
            assert_eq!(PatternId::from_raw(id.as_u16()), Some(id));
        }
    }

    #[test]
    fn test_pattern_id_names() {
        assert_eq!(PatternId::CircleIn.as_str(), "circle_in");
        assert_eq!(
            PatternId::parse_from_str("persist_status_1"),
            Some(PatternId::PersistStatus1)
        );
        assert_eq!(PatternId::parse_from_str("load_out"), Some(PatternId::LoadOut));
        assert_eq!(PatternId::parse_from_str("rainbow"), None);
    }
}
