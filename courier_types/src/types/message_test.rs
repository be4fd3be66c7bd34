#[cfg(test)]
mod test {
    use crate::serde::Codec;
    use crate::types::{Message, MessageCodec};
    use anyhow::{anyhow, Result};
    use itertools::Itertools;
    use rand::seq::SliceRandom;
    use std::collections::BTreeMap;
    use std::io::Cursor;

    const CODEC: MessageCodec = MessageCodec::new();

    fn verify(pre_serialized: &Vec<Message>) -> Result<()> {
        let (serialized, w_len_at_each_msg) = {
            let mut serialized: Vec<u8> = vec![];
            let mut w_len_at_each_msg: Vec<usize> = vec![]; // Cumulative `w_len`s.

            let w = &mut serialized;
            let mut w_len = 0;
            for msg in pre_serialized {
                let delta_w_len = CODEC.encode(msg, w)?;
                w_len += *delta_w_len;
                w_len_at_each_msg.push(w_len);
            }
            assert_eq!(
                serialized.len(),
                w_len,
                "\n{:?}\n{:?}\n",
                pre_serialized,
                serialized
            );

            (serialized, w_len_at_each_msg)
        };

        {
            let mut r = Cursor::new(&serialized);
            let mut r_len = 0;
            for msg_i in 0..pre_serialized.len() {
                r_len += CODEC.skip(&mut r)?;
                assert_eq!(w_len_at_each_msg[msg_i], r_len);
            }
            assert_eq!(r.position() as usize, serialized.len());
        }

        {
            let mut r = Cursor::new(&serialized);
            let mut r_len = 0;
            let mut deserialized: Vec<Message> = vec![];
            for msg_i in 0..pre_serialized.len() {
                let (delta_r_len, msg) = CODEC.decode(&mut r)?;
                r_len += delta_r_len;
                deserialized.push(msg);
                assert_eq!(w_len_at_each_msg[msg_i], r_len);
            }
            assert!(
                CODEC.decode(&mut r).is_err(),
                "Expected exhaustion after the last message."
            );
            assert_eq!(
                pre_serialized, &deserialized,
                "\n{:?}\n{:?}\n",
                pre_serialized, serialized
            );
        }

        Ok(())
    }

    type SetField = fn(Message) -> Message;

    fn set_attributes(msg: Message) -> Message {
        msg.with_attributes(BTreeMap::from([
            (String::from("region"), String::from("eu-west")),
            (String::from("source"), String::from("sensor-7")),
        ]))
    }
    fn set_empty_attributes(msg: Message) -> Message {
        msg.with_attributes(BTreeMap::new())
    }
    fn set_message_id(msg: Message) -> Message {
        msg.with_message_id(String::from("m-00000001"))
    }
    fn set_topic(msg: Message) -> Message {
        msg.with_topic(String::from("telemetry"))
    }

    fn build(payload: Vec<u8>, set_fns: &[&SetField]) -> Message {
        let mut msg = Message::new(payload);
        for set_fn in set_fns {
            msg = set_fn(msg);
        }
        msg
    }

    #[test]
    fn encode_then_decode() -> Result<()> {
        let mut rand_rng = rand::thread_rng();

        let set_fns: [SetField; 4] = [
            set_attributes,
            set_empty_attributes,
            set_message_id,
            set_topic,
        ];

        for mut set_fns in set_fns.iter().powerset() {
            let msgs = vec![
                build(vec![], &set_fns),
                build(String::from("asdf").into_bytes(), &set_fns),
            ];
            verify(&msgs)?;

            set_fns.shuffle(&mut rand_rng);
            let msgs = vec![
                build(vec![], &set_fns),
                build(String::from("asdf").into_bytes(), &set_fns),
            ];
            verify(&msgs)?;
        }

        Ok(())
    }

    #[test]
    fn byte_identical_across_equal_messages() -> Result<()> {
        let msg_ab = Message::new(String::from("asdf").into_bytes()).with_attributes(
            BTreeMap::from_iter([
                (String::from("a"), String::from("1")),
                (String::from("b"), String::from("2")),
            ]),
        );
        let msg_ba = Message::new(String::from("asdf").into_bytes()).with_attributes(
            BTreeMap::from_iter([
                (String::from("b"), String::from("2")),
                (String::from("a"), String::from("1")),
            ]),
        );
        assert_eq!(msg_ab, msg_ba);

        let serialized_ab = CODEC.encode_to_vec(&msg_ab)?;
        let serialized_ba = CODEC.encode_to_vec(&msg_ba)?;
        assert_eq!(serialized_ab, serialized_ba);

        /* re-encoding the same value is also byte-identical */
        assert_eq!(serialized_ab, CODEC.encode_to_vec(&msg_ab)?);

        Ok(())
    }

    #[test]
    fn absent_vs_empty_attributes() -> Result<()> {
        let absent = Message::new(String::from("x").into_bytes());
        let empty = Message::new(String::from("x").into_bytes()).with_attributes(BTreeMap::new());

        let serialized_absent = CODEC.encode_to_vec(&absent)?;
        let serialized_empty = CODEC.encode_to_vec(&empty)?;
        assert_ne!(serialized_absent, serialized_empty);

        assert_eq!(CODEC.decode_solo(&serialized_absent)?.attributes, None);
        assert_eq!(
            CODEC.decode_solo(&serialized_empty)?.attributes,
            Some(BTreeMap::new())
        );

        Ok(())
    }

    /// With all four fields present, cutting the stream at any point before
    /// its end must fail the decode; no cut may yield a partially built
    /// message.
    #[test]
    fn truncated_input() -> Result<()> {
        let msg = set_topic(set_message_id(set_attributes(Message::new(
            String::from("asdf").into_bytes(),
        ))));
        let serialized = CODEC.encode_to_vec(&msg)?;

        for cut in 0..serialized.len() {
            assert!(
                CODEC.decode_solo(&serialized[..cut]).is_err(),
                "Cut at {} decoded.",
                cut
            );
        }

        Ok(())
    }

    #[test]
    fn corrupt_presence_flag() -> Result<()> {
        let msg = Message::new(String::from("asdf").into_bytes());
        let mut serialized = CODEC.encode_to_vec(&msg)?;

        /* The attributes presence flag follows the length-prefixed payload. */
        let flag_i = 4 + msg.payload.len();
        assert_eq!(serialized[flag_i], 0);
        serialized[flag_i] = 7;

        let res = CODEC.decode_solo(&serialized);
        let err = res.err().ok_or(anyhow!("Expected a decode failure."))?;
        assert!(err.to_string().contains("Unknown"), "{}", err);

        Ok(())
    }

    #[test]
    fn concrete_full_scenario() -> Result<()> {
        let msg = Message::new(String::from("testData").into_bytes())
            .with_attributes(BTreeMap::from([(String::from("1"), String::from("hello"))]))
            .with_message_id(String::from("testMessageId"));
        let serialized = CODEC.encode_to_vec(&msg)?;

        let mut expected: Vec<u8> = vec![];
        /* payload */
        expected.extend_from_slice(&8u32.to_le_bytes());
        expected.extend_from_slice(b"testData");
        /* attributes */
        expected.push(1);
        expected.extend_from_slice(&1u32.to_le_bytes());
        expected.extend_from_slice(&1u32.to_le_bytes());
        expected.extend_from_slice(b"1");
        expected.extend_from_slice(&5u32.to_le_bytes());
        expected.extend_from_slice(b"hello");
        /* message_id */
        expected.push(1);
        expected.extend_from_slice(&13u32.to_le_bytes());
        expected.extend_from_slice(b"testMessageId");
        /* topic */
        expected.push(0);

        assert_eq!(serialized, expected);
        assert_eq!(CODEC.decode_solo(&serialized)?, msg);

        Ok(())
    }

    #[test]
    fn concrete_all_absent_scenario() -> Result<()> {
        let msg = Message::new(vec![]);
        let serialized = CODEC.encode_to_vec(&msg)?;

        /* zero payload length, then three absent flags */
        assert_eq!(serialized, vec![0, 0, 0, 0, 0, 0, 0]);

        let decoded = CODEC.decode_solo(&serialized)?;
        assert_eq!(decoded.payload, Vec::<u8>::new());
        assert_eq!(decoded.attributes, None);
        assert_eq!(decoded.message_id, None);
        assert_eq!(decoded.topic, None);

        Ok(())
    }
}
