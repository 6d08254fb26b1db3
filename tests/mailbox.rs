mod common;

mod tests {
    use embassy_futures::block_on;
    use ring_pattern_player::mailbox::{TryReceiveError, TrySendError};
    use ring_pattern_player::{
        ChannelMailbox, Duration, Mailbox, MailboxUnavailable, PatternChannel, PatternId,
        PatternMessage,
    };

    use crate::common::{BLUE, RED, ScriptedMailbox, VirtualClock};

    fn flash(color: ring_pattern_player::Rgb) -> PatternMessage {
        PatternMessage::new(PatternId::Flash, color, false)
    }

    #[test]
    fn test_channel_is_fifo() {
        let channel: PatternChannel<4> = PatternChannel::new();
        let sender = channel.sender();
        let receiver = channel.receiver();

        assert!(channel.is_empty());
        sender.try_send(flash(RED)).unwrap();
        sender.try_send(flash(BLUE)).unwrap();
        assert_eq!(channel.len(), 2);

        assert_eq!(receiver.try_receive(), Ok(flash(RED)));
        assert_eq!(receiver.try_receive(), Ok(flash(BLUE)));
        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
    }

    #[test]
    fn test_full_channel_rejects_new_messages() {
        let channel: PatternChannel<2> = PatternChannel::new();
        let sender = channel.sender();
        sender.try_send(flash(RED)).unwrap();
        sender.try_send(flash(RED)).unwrap();
        assert!(channel.is_full());

        let rejected = PatternMessage::new(PatternId::Off, BLUE, false);
        assert_eq!(sender.try_send(rejected), Err(TrySendError(rejected)));

        // Nothing queued was overwritten
        assert_eq!(channel.try_receive(), Ok(flash(RED)));
        assert_eq!(channel.try_receive(), Ok(flash(RED)));
        assert!(channel.is_empty());
    }

    #[test]
    fn test_channel_mailbox_returns_queued_message_immediately() {
        let channel: PatternChannel = PatternChannel::new();
        let mut clock = VirtualClock::new();
        let mut mailbox = ChannelMailbox::new(channel.receiver(), &mut clock);

        channel.sender().try_send(flash(RED)).unwrap();
        let received = block_on(mailbox.receive(Duration::from_millis(10)));
        assert_eq!(received, Ok(Some(flash(RED))));

        drop(mailbox);
        assert_eq!(clock.elapsed_us, 0);
    }

    #[test]
    fn test_channel_mailbox_waits_for_timeout() {
        let channel: PatternChannel = PatternChannel::new();
        let mut clock = VirtualClock::new();
        let mut mailbox = ChannelMailbox::new(channel.receiver(), &mut clock)
            .with_poll_interval(Duration::from_millis(4));

        let received = block_on(mailbox.receive(Duration::from_millis(10)));
        assert_eq!(received, Ok(None));

        drop(mailbox);
        assert_eq!(clock.delays_us, [4_000, 4_000, 2_000]);
        assert_eq!(clock.elapsed_ms(), 10);
    }

    #[test]
    fn test_channel_mailbox_zero_timeout_polls_once() {
        let channel: PatternChannel = PatternChannel::new();
        let mut clock = VirtualClock::new();
        let mut mailbox = ChannelMailbox::new(channel.receiver(), &mut clock);

        let received = block_on(mailbox.receive(Duration::from_millis(0)));
        assert_eq!(received, Ok(None));

        drop(mailbox);
        assert!(clock.delays_us.is_empty());
    }

    #[test]
    fn test_channel_mailbox_saturates_long_polls() {
        let channel: PatternChannel = PatternChannel::new();
        let mut clock = VirtualClock::new();
        let long = Duration::from_secs(10_000);
        let mut mailbox = ChannelMailbox::new(channel.receiver(), &mut clock).with_poll_interval(long);

        let received = block_on(mailbox.receive(long));
        assert_eq!(received, Ok(None));

        drop(mailbox);
        assert_eq!(clock.delays_us, [u64::from(u32::MAX)]);
    }

    #[test]
    fn test_missing_mailbox_is_unavailable() {
        let mut missing: Option<ScriptedMailbox> = None;
        let received = block_on(missing.receive(Duration::from_millis(10)));
        assert_eq!(received, Err(MailboxUnavailable));

        let mut attached = Some(ScriptedMailbox::new([Some(flash(RED))]));
        let received = block_on(attached.receive(Duration::from_millis(10)));
        assert_eq!(received, Ok(Some(flash(RED))));
    }
}
