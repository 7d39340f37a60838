use ares::assistant::{KnowledgeBase, FALLBACK_ANSWER, KNOWLEDGE};
use ares::models::KeywordEntry;
use ares::AresError;
use speculate2::speculate;

static OVERLAPPING: &[KeywordEntry] = &[
    KeywordEntry {
        keyword: "volume",
        answer: "generic volume",
    },
    KeywordEntry {
        keyword: "sleep volume",
        answer: "specific sleep volume",
    },
];

speculate! {
    before {
        let kb = KnowledgeBase::default();
    }

    describe "answer" {
        it "matches keywords embedded in upper-case questions" {
            for entry in KNOWLEDGE {
                let query = format!("Could you explain {} please", entry.keyword.to_uppercase());
                let reply = kb.answer(&query).expect("lookup failed");
                let expected = KNOWLEDGE
                    .iter()
                    .find(|e| query.to_lowercase().contains(e.keyword))
                    .unwrap();
                assert_eq!(reply.answer, expected.answer);
                assert!(reply.matched);
            }
        }

        it "answers a bare keyword with the first entry it contains" {
            for entry in KNOWLEDGE {
                let reply = kb.answer(entry.keyword).expect("lookup failed");
                let first = KNOWLEDGE
                    .iter()
                    .find(|e| entry.keyword.contains(e.keyword))
                    .unwrap();
                assert_eq!(reply.answer, first.answer);
            }
        }

        it "signals missing input for empty and whitespace queries" {
            assert!(matches!(kb.answer(""), Err(AresError::MissingQuery)));
            assert!(matches!(kb.answer("   "), Err(AresError::MissingQuery)));
        }

        it "returns the fallback message when nothing matches" {
            let reply = kb.answer("xyzzy not a real term").expect("lookup failed");
            assert_eq!(reply.answer, FALLBACK_ANSWER);
            assert_eq!(reply.keyword, None);
        }
    }

    describe "match order" {
        it "prefers the earlier keyword over a more specific later one" {
            let custom = KnowledgeBase::new(OVERLAPPING);
            let reply = custom.answer("how big is the sleep volume").expect("lookup failed");
            assert_eq!(reply.answer, "generic volume");
        }

        it "picks crew over sleep volume because crew is declared first" {
            let reply = kb.answer("sleep volume for the crew").expect("lookup failed");
            assert_eq!(reply.keyword.as_deref(), Some("crew"));
        }
    }
}
