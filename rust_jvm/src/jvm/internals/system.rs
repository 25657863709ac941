/*
 * Class:     java_lang_System
 * Method:    registerNatives
 * Signature: ()V
 */
// JNIEXPORT void JNICALL Java_java_lang_System_registerNatives
// (JNIEnv *, jclass);

/*
 * Class:     java_lang_System
 * Method:    setIn0
 * Signature: (Ljava/io/InputStream;)V
 */
// JNIEXPORT void JNICALL Java_java_lang_System_setIn0
// (JNIEnv *, jclass, jobject);

/*
 * Class:     java_lang_System
 * Method:    setOut0
 * Signature: (Ljava/io/PrintStream;)V
 */
// JNIEXPORT void JNICALL Java_java_lang_System_setOut0
// (JNIEnv *, jclass, jobject);

/*
 * Class:     java_lang_System
 * Method:    setErr0
 * Signature: (Ljava/io/PrintStream;)V
 */
// JNIEXPORT void JNICALL Java_java_lang_System_setErr0
// (JNIEnv *, jclass, jobject);

/*
 * Class:     java_lang_System
 * Method:    currentTimeMillis
 * Signature: ()J
 */
// JNIEXPORT jlong JNICALL Java_java_lang_System_currentTimeMillis
// (JNIEnv *, jclass);

/*
 * Class:     java_lang_System
 * Method:    nanoTime
 * Signature: ()J
 */
// JNIEXPORT jlong JNICALL Java_java_lang_System_nanoTime
// (JNIEnv *, jclass);

/*
 * Class:     java_lang_System
 * Method:    arraycopy
 * Signature: (Ljava/lang/Object;ILjava/lang/Object;II)V
 */
// JNIEXPORT void JNICALL Java_java_lang_System_arraycopy
// (JNIEnv *, jclass, jobject, jint, jobject, jint, jint);

/*
 * Class:     java_lang_System
 * Method:    identityHashCode
 * Signature: (Ljava/lang/Object;)I
 */
// JNIEXPORT jint JNICALL Java_java_lang_System_identityHashCode
// (JNIEnv *, jclass, jobject);

/*
 * Class:     java_lang_System
 * Method:    initProperties
 * Signature: (Ljava/util/Properties;)Ljava/util/Properties;
 */
// JNIEXPORT jobject JNICALL Java_java_lang_System_initProperties
// (JNIEnv *, jclass, jobject);

/*
 * Class:     java_lang_System
 * Method:    mapLibraryName
 * Signature: (Ljava/lang/String;)Ljava/lang/String;
 */
// JNIEXPORT jstring JNICALL Java_java_lang_System_mapLibraryName
// (JNIEnv *, jclass, jstring);
