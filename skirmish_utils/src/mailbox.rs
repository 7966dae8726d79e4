//local shortcuts

//third-party shortcuts

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Posting side of a mailbox (multi-producer).
#[derive(Clone, Debug)]
pub struct MailboxSender<T>
{
    sender: crossbeam::channel::Sender<T>
}

impl<T> MailboxSender<T>
{
    /// Posts a message.
    ///
    /// Returns `false` if the receiving side was dropped (the message is discarded).
    pub fn post(&self, message: T) -> bool
    {
        self.sender.send(message).is_ok()
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// Collecting side of a mailbox.
#[derive(Clone, Debug)]
pub struct MailboxReceiver<T>
{
    receiver: crossbeam::channel::Receiver<T>
}

impl<T> MailboxReceiver<T>
{
    /// Takes the next pending message.
    pub fn try_take(&self) -> Option<T>
    {
        self.receiver.try_recv().ok()
    }

    /// Takes every pending message in posting order.
    pub fn take_all(&self) -> Vec<T>
    {
        self.receiver.try_iter().collect()
    }

    pub fn len(&self) -> usize
    {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.receiver.is_empty()
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// Makes an unbounded mailbox.
pub fn new_mailbox<T>() -> (MailboxSender<T>, MailboxReceiver<T>)
{
    let (sender, receiver) = crossbeam::channel::unbounded::<T>();
    (MailboxSender{ sender }, MailboxReceiver{ receiver })
}

//-------------------------------------------------------------------------------------------------------------------
