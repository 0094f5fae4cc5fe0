mod unit_tests {
    use crate::convert::zh::syllable::{ToneStyle, simplify_tone_marks, syllable_to_ipa};
    use crate::{Lang, segment};

    fn arrow(p: &str) -> String {
        syllable_to_ipa(p, ToneStyle::Arrow)
    }

    #[test]
    fn tone_coverage() {
        assert_eq!(arrow("ma1"), "ma→");
        assert_eq!(arrow("ma2"), "ma↗");
        assert_eq!(arrow("ma3"), "ma↓");
        assert_eq!(arrow("ma4"), "ma↘");
        assert_eq!(arrow("ma5"), "ma");
    }

    #[test]
    fn retroflex_dental_allophony() {
        let retroflex = arrow("zhi1");
        let dental = arrow("zi1");
        let general = arrow("mi1");
        assert_eq!(retroflex, "ʈʂɻ̩→");
        assert_eq!(dental, "ʦɹ̩→");
        assert_eq!(general, "mi→");
        assert_ne!(retroflex, dental);
    }

    #[test]
    fn tone_simplification_ordering() {
        // the three-letter dipping contour must win before the
        // single-letter high tone
        assert_eq!(simplify_tone_marks("˧˩˧˥"), "↓→");
        assert_eq!(simplify_tone_marks("xau̯˧˩˧"), "xau̯↓");
    }

    #[test]
    fn detector_per_script() {
        assert_eq!(segment::detect("你好世界"), Lang::Chinese);
        assert_eq!(segment::detect("我爱编程"), Lang::Chinese);
        assert_eq!(segment::detect("こんにちは"), Lang::Japanese);
        assert_eq!(segment::detect("ありがとう"), Lang::Japanese);
        assert_eq!(segment::detect("コンニチハ"), Lang::Japanese);
        assert_eq!(segment::detect("안녕하세요"), Lang::Korean);
        assert_eq!(segment::detect("감사합니다"), Lang::Korean);
        assert_eq!(segment::detect("Hello World"), Lang::English);
    }

    #[test]
    fn detector_unknown_inputs() {
        assert_eq!(segment::detect(""), Lang::Unknown);
        assert_eq!(segment::detect("。，！？"), Lang::Unknown);
        assert_eq!(segment::detect("   "), Lang::Unknown);
    }

    #[test]
    fn kana_disambiguates_japanese_from_ideographs() {
        // Ideographs alone read as Chinese; kana tips the balance once
        // it dominates the classified count.
        assert_eq!(segment::detect("今日"), Lang::Chinese);
        assert_eq!(segment::detect("今日はとてもいい天気です"), Lang::Japanese);
    }
}
